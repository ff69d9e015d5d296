fn main() {
    if let Err(err) = appdeck::run() {
        appdeck::printer::error(format!("Error: {}", err));
        std::process::exit(1);
    }
}
