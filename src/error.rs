use thiserror::Error;

/// Rejections raised while turning raw form input into a `TripRequest`.
///
/// The display text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Por favor, preencha todos os campos corretamente.")]
    MissingField(&'static str),
    #[error("Por favor, preencha todos os campos corretamente.")]
    NotANumber(&'static str),
    #[error("Por favor, preencha todos os campos corretamente.")]
    InvalidFactor(f64),
    #[error("Distância e número de passageiros devem ser maiores que zero.")]
    NonPositive(&'static str),
    #[error("Por favor, preencha todos os campos corretamente.")]
    MalformedBody(String),
    #[error("O valor informado está fora do intervalo permitido.")]
    OutOfRange(&'static str),
    #[error("Os valores informados geram uma emissão grande demais para ser calculada.")]
    TotalOverflow,
}

impl ValidationError {
    /// Name of the offending field, when one is known.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::MissingField(field)
            | ValidationError::NotANumber(field)
            | ValidationError::NonPositive(field)
            | ValidationError::OutOfRange(field) => Some(field),
            ValidationError::InvalidFactor(_) => Some("factor"),
            ValidationError::MalformedBody(_) | ValidationError::TotalOverflow => None,
        }
    }
}
