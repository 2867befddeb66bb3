/*
* Voice webhook endpoints and routes module.
* Answers the telephony platform's call events with a fixed TwiML document.
*/

pub mod handler;
pub mod routes;

pub use routes::call_routes;
