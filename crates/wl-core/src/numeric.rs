/// Floating point type used throughout the workspace
pub type Real = f64;

/// Parse user-entered axis-bound text.
///
/// Blank, unparseable and non-finite text all mean "unset" (autoscale).
pub fn parse_axis_bound(text: &str) -> Option<Real> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<Real>().ok().filter(|v| v.is_finite())
}

/// Min and max of the finite values in `values`, or `None` if there are none.
pub fn finite_extent<I>(values: I) -> Option<(Real, Real)>
where
    I: IntoIterator<Item = Real>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
