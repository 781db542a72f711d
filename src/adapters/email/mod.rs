pub mod postmark;
