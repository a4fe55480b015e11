//! Error: catch-all clause with a bare binding

fn main() {
    let _ = catch_this::dispatch! { catch_this::ErrorHandle::empty() =>
        catch e { 0 }
    };
}
