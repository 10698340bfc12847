mod food_record;
mod zone;

pub use food_record::FoodRecord;
pub use zone::Zone;
