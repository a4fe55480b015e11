//! Error: reserved binding name

fn main() {
    let _ = catch_this::dispatch! { catch_this::ErrorHandle::empty() =>
        catch std::fmt::Error(__handle) { 0 }
    };
}
