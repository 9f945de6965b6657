fn main() {
    run_ecs::app::cli::run();
}
