mod controller;
mod middleware;
mod util;
