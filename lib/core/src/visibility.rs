// Listing visibility rules
use crate::model::{Directory, Listing, Privacy, User};

pub trait ListingFilter {
    fn matches(&self, listing: &Listing) -> bool;
}

/// Can `viewer` see `listing`?
///
/// Public listings are visible to everyone. Circle listings are visible to
/// the owner and to users sharing the owner's circle. A circle listing whose
/// owner is missing from the directory is visible only to that owner id.
pub fn can_view<D: Directory + ?Sized>(viewer: &User, listing: &Listing, directory: &D) -> bool {
    match listing.privacy {
        Privacy::Public => true,
        Privacy::Circle => {
            if viewer.id == listing.owner_id {
                return true;
            }
            directory
                .user(listing.owner_id)
                .map(|owner| owner.circle == viewer.circle)
                .unwrap_or(false)
        }
    }
}

/// Filter admitting only listings a given viewer may see
pub struct VisibleTo<'a, D: Directory + ?Sized> {
    viewer: &'a User,
    directory: &'a D,
}

impl<'a, D: Directory + ?Sized> VisibleTo<'a, D> {
    pub fn new(viewer: &'a User, directory: &'a D) -> Self {
        Self { viewer, directory }
    }
}

impl<D: Directory + ?Sized> ListingFilter for VisibleTo<'_, D> {
    fn matches(&self, listing: &Listing) -> bool {
        can_view(self.viewer, listing, self.directory)
    }
}

/// Listings visible to `viewer`, ascending id
pub fn visible_listings<'a, D: Directory + ?Sized>(
    viewer: &'a User,
    directory: &'a D,
) -> Vec<&'a Listing> {
    let filter = VisibleTo::new(viewer, directory);
    directory.listings().filter(|l| filter.matches(l)).collect()
}
