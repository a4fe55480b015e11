//! Error: unknown keyword

fn main() {
    let _ = catch_this::dispatch! { catch_this::ErrorHandle::empty() =>
        throw std::fmt::Error { 0 }
    };
}
