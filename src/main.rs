mod input;
mod yew_app;

fn main() {
    yew_app::run();
}
