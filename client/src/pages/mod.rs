pub mod edit_list;
pub mod edit_task;
pub mod home;
pub mod new_list;
pub mod new_task;
pub mod sign_in;
pub mod sign_up;
