/// Builds an [`Ini`](crate::Ini) document from a literal description.
///
/// Sections and items are added in the order they are written, with the
/// same checks as [`Ini::add_section`](crate::Ini::add_section) and
/// [`Section::add_item`](crate::Section::add_item). The macro evaluates to
/// `Result<Ini>` so invalid names or values surface as errors.
///
/// # Examples
///
/// ```rust
/// use strict_ini::ini;
///
/// let ini = ini! {
///     "server" => {
///         "host" => "localhost",
///         "port" => 8080,
///     },
///     "limits" => {
///         "ratio" => 0.5,
///     },
/// }
/// .unwrap();
///
/// assert_eq!(ini.get::<u16>("server", "port").unwrap(), 8080);
/// assert_eq!(
///     ini.to_string(),
///     "[server]\nhost=\"localhost\"\nport=8080\n\n[limits]\nratio=0.5"
/// );
///
/// assert!(ini! { "bad name" => {} }.is_err());
/// ```
#[macro_export]
macro_rules! ini {
    () => {
        ::std::result::Result::<$crate::Ini, $crate::Error>::Ok($crate::Ini::new())
    };

    ($($section:literal => { $($key:literal => $value:expr),* $(,)? }),+ $(,)?) => {
        (|| -> $crate::Result<$crate::Ini> {
            let mut ini = $crate::Ini::new();
            $(
                #[allow(unused_variables)]
                let section = ini.add_section($section)?;
                $(
                    section.add_item($key, $value)?;
                )*
            )+
            ::std::result::Result::Ok(ini)
        })()
    };
}
