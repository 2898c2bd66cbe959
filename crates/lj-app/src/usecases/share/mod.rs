mod build_share_result;

pub use build_share_result::BuildShareResult;
