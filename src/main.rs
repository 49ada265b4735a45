fn main() {
    bigcursor_lib::run()
}
