pub use super::gym::Entity as Gym;
pub use super::join_request::Entity as JoinRequest;
pub use super::member::Entity as Member;
pub use super::user::Entity as User;
