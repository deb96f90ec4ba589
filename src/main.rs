use std::process;

fn main() {
    if let Err(err) = knight_distance::cli::run(std::env::args().skip(1)) {
        eprintln!("error: {err}");
        process::exit(2);
    }
}
