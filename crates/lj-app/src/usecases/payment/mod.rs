mod check_payment_status;

pub use check_payment_status::CheckPaymentStatus;
