mod app;

fn main() {
    dioxus::launch(app::App);
}
