pub mod a001_user_entry;
