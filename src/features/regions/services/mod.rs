mod region_directory;

pub use region_directory::RegionDirectory;
