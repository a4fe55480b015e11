//! Error: catch-all clause without a type

fn main() {
    let _ = catch_this::dispatch! { catch_this::ErrorHandle::empty() =>
        catch { 0 }
    };
}
