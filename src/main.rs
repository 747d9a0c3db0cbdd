fn main() {
    if let Err(err) = svg_scene::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
