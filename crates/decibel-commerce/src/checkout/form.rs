//! Checkout form and field validation.

/// How the customer pays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Pre-paid e-Money; number and PIN are required fields.
    EMoney { number: String, pin: String },
    /// Pay the courier on delivery.
    CashOnDelivery,
}

/// One field's validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// The checkout form.
///
/// Validation reports every failing field at once so the whole form can
/// be marked up in a single pass, mirroring how the storefront displays
/// errors next to each input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
    pub payment: PaymentMethod,
}

impl CheckoutForm {
    /// Validate all fields, returning every violation.
    ///
    /// An empty result means the form is ready to submit.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        }

        if self.email.trim().is_empty() {
            errors.push(FieldError::new("email", "Email is required"));
        } else if !is_valid_email(self.email.trim()) {
            errors.push(FieldError::new("email", "Wrong format"));
        }

        if self.phone.trim().is_empty() {
            errors.push(FieldError::new("phone", "Phone number is required"));
        } else if !is_valid_phone(self.phone.trim()) {
            errors.push(FieldError::new("phone", "Wrong format"));
        }

        if self.address.trim().is_empty() {
            errors.push(FieldError::new("address", "Address is required"));
        }

        if self.zip_code.trim().is_empty() {
            errors.push(FieldError::new("zip_code", "ZIP Code is required"));
        }

        if self.city.trim().is_empty() {
            errors.push(FieldError::new("city", "City is required"));
        }

        if self.country.trim().is_empty() {
            errors.push(FieldError::new("country", "Country is required"));
        }

        if let PaymentMethod::EMoney { number, pin } = &self.payment {
            if number.trim().is_empty() {
                errors.push(FieldError::new(
                    "e_money_number",
                    "e-Money Number is required",
                ));
            }
            if pin.trim().is_empty() {
                errors.push(FieldError::new("e_money_pin", "e-Money PIN is required"));
            }
        }

        errors
    }

    /// Whether the form passes validation.
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// `local@domain.tld` shape: exactly one `@`, no whitespace, and a dot
/// with something on both sides in the domain.
fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = s.split('@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if parts.next().is_some() || local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Optional leading `+`, then digits, spaces, dashes, and parentheses,
/// with at least one digit.
fn is_valid_phone(s: &str) -> bool {
    let rest = s.strip_prefix('+').unwrap_or(s);
    if rest.is_empty() {
        return false;
    }
    rest.chars().any(|c| c.is_ascii_digit())
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            name: "Alexei Ward".to_string(),
            email: "alexei@mail.com".to_string(),
            phone: "+1 202-555-0136".to_string(),
            address: "1137 Williams Avenue".to_string(),
            zip_code: "10001".to_string(),
            city: "New York".to_string(),
            country: "United States".to_string(),
            payment: PaymentMethod::EMoney {
                number: "238521993".to_string(),
                pin: "6891".to_string(),
            },
        }
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert!(filled_form().is_valid());
    }

    #[test]
    fn test_every_empty_field_reported_at_once() {
        let form = CheckoutForm {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            zip_code: String::new(),
            city: String::new(),
            country: String::new(),
            payment: PaymentMethod::EMoney {
                number: String::new(),
                pin: String::new(),
            },
        };

        let errors = form.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "name",
                "email",
                "phone",
                "address",
                "zip_code",
                "city",
                "country",
                "e_money_number",
                "e_money_pin"
            ]
        );
    }

    #[test]
    fn test_bad_email_reports_wrong_format_alongside_other_errors() {
        let mut form = filled_form();
        form.email = "not-an-email".to_string();
        form.city = String::new();

        let errors = form.validate();
        assert!(errors
            .iter()
            .any(|e| e.field == "email" && e.message == "Wrong format"));
        assert!(errors.iter().any(|e| e.field == "city"));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co")); // empty host
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b@c.co"));
    }

    #[test]
    fn test_phone_shapes() {
        assert!(is_valid_phone("+1 (202) 555-0136"));
        assert!(is_valid_phone("202 555 0136"));
        assert!(!is_valid_phone("+"));
        assert!(!is_valid_phone("---")); // no digit
        assert!(!is_valid_phone("call me"));
    }

    #[test]
    fn test_cash_on_delivery_skips_e_money_fields() {
        let mut form = filled_form();
        form.payment = PaymentMethod::CashOnDelivery;
        assert!(form.is_valid());
    }
}
