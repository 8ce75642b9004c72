mod create_record;
mod delete_record;
mod list_records;
mod record_detail;
mod update_record;

pub use create_record::create_fitness_record;
pub use delete_record::delete_fitness_record;
pub use list_records::list_fitness_records;
pub use record_detail::get_fitness_record;
pub use update_record::update_fitness_record;
