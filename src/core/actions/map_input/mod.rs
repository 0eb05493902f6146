pub mod input_mapper;
