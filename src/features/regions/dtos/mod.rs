mod region_dto;

pub use region_dto::{
    CountryResponseDto, StateValidationDto, SubdivisionResponseDto, ValidateStateQuery,
};
