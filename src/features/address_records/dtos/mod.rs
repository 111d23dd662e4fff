mod record_dto;

pub use record_dto::{
    AddressRecordResponseDto, CreateRecordQuery, FindRecordsQuery, RecordNameQuery,
    UpdateRecordQuery,
};
