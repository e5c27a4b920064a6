use url::Url;

/// Checks whether `candidate` belongs to the same site as `base`
///
/// Two URLs are same-origin when their schemes and host strings are equal.
/// Ports are deliberately not compared: `http://x:80/` and `http://x:8080/`
/// count as the same site. Hosts are compared as serialized by the `url`
/// crate, which lowercases domain names during parsing.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_mirror::url::is_same_origin;
///
/// let base = Url::parse("http://a.com/").unwrap();
/// assert!(is_same_origin(&Url::parse("http://a.com/x").unwrap(), &base));
/// assert!(!is_same_origin(&Url::parse("http://b.com/x").unwrap(), &base));
/// assert!(!is_same_origin(&Url::parse("https://a.com/x").unwrap(), &base));
/// ```
pub fn is_same_origin(candidate: &Url, base: &Url) -> bool {
    candidate.scheme() == base.scheme() && candidate.host_str() == base.host_str()
}
