pub mod a001_booking;
pub mod a002_user;
pub mod a003_payment;
pub mod a004_review;
pub mod a005_offer;
pub mod a007_company_profile;
