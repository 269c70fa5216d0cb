fn main() {
    bullet_pool::game::run();
}
