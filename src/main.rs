fn main() {
    coachbot::app::cli::run();
}
