/// Use cases module containing application business logic orchestration
mod write_constitution;

pub use write_constitution::WriteConstitutionUseCase;
