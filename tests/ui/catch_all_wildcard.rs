//! Error: catch-all clause with a wildcard

fn main() {
    let _ = catch_this::dispatch! { catch_this::ErrorHandle::empty() =>
        catch _ { 0 }
    };
}
