mod resolve_override;

pub use resolve_override::ResolveOverrideUseCase;
