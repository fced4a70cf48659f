use std::io;

use chess_legality::console::command_loop::run_stdio_loop;

fn main() -> io::Result<()> {
    run_stdio_loop()
}
