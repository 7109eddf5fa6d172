use cwlist::app::Application;

fn main() {
    let exit_code = Application::run();
    std::process::exit(exit_code);
}
