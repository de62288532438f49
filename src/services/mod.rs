// SiteManager services
// Services provide stateless functionality alongside the managers.

pub mod roi_calculator;
