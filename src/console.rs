use std::io::{self, BufRead, Write};

use crate::complex::Complex;
use crate::error::SessionError;
use crate::messages::Messages;

/// Prompts until a line parses as a complex number.
///
/// Badly formatted lines and lines which aren't valid UTF-8 are reported and the prompt
/// is repeated, there is no limit on the number of attempts. End of input ends the
/// session with `SessionError::InputClosed`.
pub fn read_complex<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    messages: &Messages,
) -> Result<Complex, SessionError> {
    loop {
        writeln!(output, "{}", prompt)?;
        output.flush()?;
        let mut line = String::new();

        match input.read_line(&mut line) {
            Ok(0) => return Err(SessionError::InputClosed),
            Ok(_) => {}
            Err(ref err) if err.kind() == io::ErrorKind::InvalidData => {
                warn!("unreadable input line: {}", err);
                writeln!(output, "{}", messages.unexpected_error(&err.to_string()))?;
                writeln!(output)?;
                continue;
            }
            Err(err) => return Err(err.into()),
        }

        match Complex::parse(&line) {
            Ok(c) => {
                debug!("parsed {:?} from {:?}", c, line.trim());
                return Ok(c);
            }
            Err(err) if err.is_format() => {
                warn!("rejected input {:?}: {}", line.trim(), err);
                writeln!(output, "{}", messages.retry)?;
            }
            Err(err) => {
                warn!("failed to read input {:?}: {}", line.trim(), err);
                writeln!(output, "{}", messages.unexpected_error(&messages.describe(&err)))?;
            }
        }
        writeln!(output)?;
    }
}

/// Reads two complex numbers and prints the results of combining them.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W, messages: &Messages) -> Result<(), SessionError> {
    let a = read_complex(input, output, messages.first_prompt, messages)?;
    let b = read_complex(input, output, messages.second_prompt, messages)?;

    writeln!(output)?;
    writeln!(output, "{} {}", messages.first_label, a)?;
    writeln!(output, "{} {}", messages.second_label, b)?;
    writeln!(output)?;

    writeln!(output, "a + b = {}", a + b)?;
    writeln!(output, "a - b = {}", a - b)?;
    writeln!(output, "a * b = {}", a * b)?;

    match a.checked_div(b) {
        Ok(quotient) => writeln!(output, "a / b = {}", quotient)?,
        Err(err) => {
            info!("division of {} by {} failed: {}", a, b, err);
            writeln!(output, "{}", messages.describe(&err))?;
        }
    }
    writeln!(output, "a == b: {}", a == b)?;
    writeln!(output, "a != b: {}", a != b)?;
    output.flush()?;
    Ok(())
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &[u8], messages: &Messages) -> (Result<(), SessionError>, String) {
        let mut input = Cursor::new(input.to_vec());
        let mut output = Vec::new();
        let result = run(&mut input, &mut output, messages);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn run_valid_input() {
        let (result, output) = session(b"3+4i\n1-2i\n", &Messages::english());
        assert!(result.is_ok());
        let expected = "\
Enter the first complex number in the form 'a+bi' (e.g. 3+4i):
Enter the second complex number in the form 'a+bi' (e.g. 1-2i):

First number a = 3 + 4i
Second number b = 1 - 2i

a + b = 4 + 2i
a - b = -2 - 6i
a * b = -5 - 2i
a / b = -0.8 - 0.4i
a == b: false
a != b: true
";
        assert_eq!(output, expected);
    }

    #[test]
    fn run_equal_numbers() {
        let (result, output) = session(b"2 + 2 I\r\n2+2i\r\n", &Messages::english());
        assert!(result.is_ok());
        assert!(output.contains("a == b: true\n"));
        assert!(output.contains("a != b: false\n"));
    }

    #[test]
    fn run_division_by_zero() {
        let (result, output) = session(b"3+4i\n0+0i\n", &Messages::russian());
        assert!(result.is_ok());
        assert!(!output.contains("a / b ="));
        assert!(output.contains("a * b = 0 + 0i\nПопытка деления на ноль.\na == b: false\n"));
    }

    #[test]
    fn read_complex_retries() {
        let messages = Messages::english();
        let mut input = Cursor::new(b"abc\n\n3+4\n-1.5-2i\n".to_vec());
        let mut output = Vec::new();
        let c = read_complex(&mut input, &mut output, "prompt:", &messages).unwrap();
        assert_eq!(c, Complex::new(-1.5, -2.0));

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("prompt:\n").count(), 4);
        assert_eq!(output.matches("Invalid input. Please try again.\n\n").count(), 3);
    }

    #[test]
    fn read_complex_retries_invalid_utf8() {
        let messages = Messages::english();
        let mut input = Cursor::new(b"\xff\xfe\n3+4i\n".to_vec());
        let mut output = Vec::new();
        let c = read_complex(&mut input, &mut output, "prompt:", &messages).unwrap();
        assert_eq!(c, Complex::new(3.0, 4.0));

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("prompt:\n").count(), 2);
        assert!(output.contains("Error: "));
        assert!(output.contains(". Please try again.\n\n"));
    }

    #[test]
    fn read_complex_input_closed() {
        let messages = Messages::english();
        let mut input = Cursor::new(b"nonsense\n".to_vec());
        let mut output = Vec::new();
        let result = read_complex(&mut input, &mut output, "prompt:", &messages);
        assert!(matches!(result, Err(SessionError::InputClosed)));
    }

    #[test]
    fn run_input_closed_after_first_number() {
        let (result, output) = session(b"3+4i\n", &Messages::english());
        assert!(matches!(result, Err(SessionError::InputClosed)));
        assert!(!output.contains("a + b"));
    }
}
