//! Diesel schema for person record persistence.

diesel::table! {
    /// Registered individuals.
    persons (id) {
        /// Surrogate key assigned by the `SERIAL` sequence.
        id -> Int4,
        /// Full name.
        #[max_length = 255]
        name -> Varchar,
        /// Taxpayer number as supplied, punctuation included; unique.
        cpf -> Varchar,
        /// Date of birth.
        birth_date -> Date,
        /// Contact email address, unique.
        #[max_length = 255]
        email -> Varchar,
    }
}
