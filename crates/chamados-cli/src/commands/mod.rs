pub mod export;
pub mod parse;
pub mod schema;

use chamados_core::error::ChamadosError;
use chamados_core::filter::FilterState;
use chamados_core::normalize::columns;

/// Build a FilterState from repeated `COL=VALUE` arguments.
pub fn filter_state_from_args(args: &[String]) -> Result<FilterState, ChamadosError> {
    let mut state = FilterState::new();
    for arg in args {
        let (name, value) = arg.split_once('=').ok_or_else(|| ChamadosError::UnknownColumn {
            name: arg.clone(),
        })?;
        let col = columns::resolve_canonical(name).ok_or_else(|| ChamadosError::UnknownColumn {
            name: name.to_string(),
        })?;
        state.toggle_value(col, value.trim());
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chamados_core::model::Column;

    #[test]
    fn parses_column_value_pairs() {
        let state =
            filter_state_from_args(&["Status=Em Campo".into(), "Cidade=Recife".into()]).unwrap();
        assert_ne!(
            state.column(Column::Status),
            &chamados_core::filter::ColumnFilter::Unrestricted
        );
        assert_ne!(
            state.column(Column::Cidade),
            &chamados_core::filter::ColumnFilter::Unrestricted
        );
    }

    #[test]
    fn unknown_column_is_reported() {
        let err = filter_state_from_args(&["Inexistente=x".into()]).unwrap_err();
        assert!(matches!(err, ChamadosError::UnknownColumn { .. }));
    }

    #[test]
    fn missing_equals_sign_is_reported() {
        assert!(filter_state_from_args(&["Status".into()]).is_err());
    }
}
