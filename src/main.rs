fn main() {
    laser_arena::game::run();
}
