fn main() {
    mvn_invoke::app::cli::run();
}
