//! Error: else must be the last clause

fn main() {
    let _ = catch_this::dispatch! { catch_this::ErrorHandle::empty() =>
        else { 0 }
        catch std::fmt::Error { 1 }
    };
}
