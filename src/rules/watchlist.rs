use crate::watchlist::Watchlist;

/// True if the traveler matches a watchlist entry by passport, or by first
/// and last name on the same entry. Case-insensitive.
#[must_use]
pub fn is_on_watchlist(passport: &str, first_name: &str, last_name: &str, watchlist: &Watchlist) -> bool {
    watchlist.contains(passport, first_name, last_name)
}
