fn main() {
    reqfile::app::cli::run()
}
