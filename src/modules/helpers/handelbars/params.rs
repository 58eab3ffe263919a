use rocket_dyn_templates::handlebars::{Helper, RenderError};

pub fn check_param_count(h: &Helper, n: u64) -> Result<(), RenderError> {
    if h.params().len() != n as usize {
        return Err(RenderError::new::<String>(format!(
            "Wrong number of arguments for helper \"{}\", {n} was expected but {} were given",
            h.name(),
            h.params().len()
        )));
    }

    Ok(())
}

pub fn f64_param(h: &Helper, index: usize) -> Result<f64, RenderError> {
    h.param(index)
        .and_then(|param| param.value().as_f64())
        .ok_or_else(|| {
            RenderError::new::<String>(format!(
                "Parameter {index} of helper \"{}\" must be a number",
                h.name()
            ))
        })
}

/// integer parameter, fractional numbers are truncated
pub fn i64_param(h: &Helper, index: usize) -> Result<i64, RenderError> {
    let value = h.param(index).map(|param| param.value());

    match value.and_then(|v| v.as_i64()) {
        Some(number) => Ok(number),
        None => value
            .and_then(|v| v.as_f64())
            .map(|number| number as i64)
            .ok_or_else(|| {
                RenderError::new::<String>(format!(
                    "Parameter {index} of helper \"{}\" must be an integer",
                    h.name()
                ))
            }),
    }
}
