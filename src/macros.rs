/// Builds a [`Document`](crate::Document) from literal entries, in order.
///
/// # Examples
///
/// ```rust
/// use stext::stext;
///
/// let doc = stext! {
///     "NAME" => "Alice",
///     "ROLE" => "admin",
/// };
///
/// assert_eq!(doc.get("NAME"), Some("Alice"));
/// let keys: Vec<_> = doc.keys().cloned().collect();
/// assert_eq!(keys, vec!["NAME", "ROLE"]);
/// ```
#[macro_export]
macro_rules! stext {
    () => {
        $crate::Document::new()
    };

    ( $($key:expr => $value:expr),* $(,)? ) => {{
        let mut doc = $crate::Document::new();
        $(
            doc.insert($key.to_string(), $value.to_string());
        )*
        doc
    }};
}
