fn main() {
    medipost::app::cli::run();
}
