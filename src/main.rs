fn main() {
    whenwords_testgen::cli::run();
}
