pub mod department_pages;
pub mod departments;
pub mod instructors;
