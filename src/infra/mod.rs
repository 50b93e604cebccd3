pub mod resource_dir;
