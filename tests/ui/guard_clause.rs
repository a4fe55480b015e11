//! Error: guards are not supported

fn main() {
    let _ = catch_this::dispatch! { catch_this::ErrorHandle::empty() =>
        catch std::fmt::Error(e) when true { 0 }
    };
}
