use std::fmt;

use crate::{BookingStatus, ItemStatus, ListingStatus, RentalStatus};

impl From<RentalStatus> for BookingStatus {
    fn from(status: RentalStatus) -> Self {
        match status {
            RentalStatus::Unknown => BookingStatus::Unknown,
            RentalStatus::Pending => BookingStatus::Pending,
            RentalStatus::Confirmed => BookingStatus::Confirmed,
            RentalStatus::Cancelled => BookingStatus::Cancelled,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
            BookingStatus::Unknown => write!(f, "unknown"),
        }
    }
}

impl From<ListingStatus> for ItemStatus {
    fn from(status: ListingStatus) -> Self {
        match status {
            ListingStatus::Unknown => ItemStatus::Unknown,
            ListingStatus::Available => ItemStatus::Available,
            ListingStatus::Rented => ItemStatus::Rented,
            ListingStatus::Unavailable => ItemStatus::Unavailable,
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::Available => write!(f, "available"),
            ItemStatus::Rented => write!(f, "rented"),
            ItemStatus::Unavailable => write!(f, "unavailable"),
            ItemStatus::Unknown => write!(f, "unknown"),
        }
    }
}
