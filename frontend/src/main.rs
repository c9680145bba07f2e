fn main() {
    dawalink_frontend::start();
}
