// src/domain/error_code.rs
//! Registry of error codes shared by the frontend and every backend service.
//!
//! Values are part of the wire contract: consumers persist and compare the
//! raw integers. New codes take the next free value and existing values are
//! never renumbered.

use crate::domain::errors::UnknownErrorCode;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

/// Nature of a failure and why it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum ErrorCode {
    /// Returned on success.
    Ok = 1,
    /// An invariant expected by the underlying system has been broken.
    Internal = 2,
    /// One or more arguments to a method were not specified.
    UndefinedArguments = 3,
    /// A primary or secondary phone number already has a user profile.
    PhoneNumberInUse = 4,
    /// A primary or secondary email address already has a user profile.
    EmailAddressInUse = 5,
    /// The requested username is already taken by another profile.
    UsernameInUse = 6,
    /// No user profile matches the UID, ID, phone number or email given.
    ProfileNotFound = 7,
    /// The provided PINs do not match.
    PinMismatch = 8,
    /// No PIN exists for the user profile; indicates corrupted data.
    PinNotFound = 9,
    /// No auth account exists for the phone number or email given.
    UserNotFound = 10,
    /// The profile was suspended for a terms violation or suspicious activity.
    ProfileSuspended = 11,
    /// The PIN could not be encrypted, validated, or had an invalid length.
    PinError = 12,
    /// The push token is shorter than the minimum length.
    InvalidPushTokenLength = 13,
    /// An invalid enum value was supplied (partner type, login provider, ...).
    InvalidEnum = 14,
    /// The supplied OTP could not be verified.
    OtpVerificationFailed = 15,
    /// A submission was made without the required OTP.
    MissingInput = 16,
    /// The flavour is neither consumer nor pro.
    InvalidFlavour = 17,
    /// The referenced record (currency, user, ...) was not found.
    RecordNotFound = 18,
    /// The selected provider is missing from the charge master.
    UnableToFindProvider = 19,
    /// Publishing a nudge failed.
    PublishNudgeFailure = 20,
    /// The customer supplied wrong credentials.
    InvalidCredentials = 21,
    /// The record could not be saved.
    AddNewRecordError = 22,
    /// The slade code in the EDI does not match the chosen provider.
    InvalidSladeCode = 23,
    /// KYC has already been submitted.
    KycAlreadySubmitted = 24,
    /// The user's role does not allow the attempted operation.
    RoleNotValid = 25,
    /// The user's insurance details are not cover-linked.
    InsuranceDetailsNotCoverLinked = 26,
    /// The user tried to add a cover that already exists.
    CoverAlreadyExists = 27,
    /// The subject's email has no access to the requested resource.
    UserNotAuthorizedToAccessThisResource = 28,
    /// The eligibility lookup on the EDI returned nothing.
    NilEligibilityMember = 29,
    /// A minor tried to add their own cover.
    MinorMember = 30,
    /// The payer details are missing.
    NilPayerDetails = 31,
    /// The eligibility lookup (dependants and allowed providers) failed.
    FailedToLookUpEligibility = 32,
    /// The subject's cover details are not linked.
    UnlinkedCover = 33,
    /// No beneficiary exists under the given member number.
    NoBeneficiaryWithMemberNumber = 34,
    /// The dependants of a principal could not be retrieved.
    FailedToFetchDependants = 35,
    /// The eligibility status is not a valid cover.
    InvalidCover = 36,
    /// The cover was not added.
    UnableToAddCover = 37,
    /// The document is not a recognized identification document.
    NotARecognizedDocumentType = 38,
    /// The request to create a member profile failed.
    FailedCreateMemberProfile = 39,
    /// Creating the member profile notification payload failed.
    FailedCreateMemberProfileNotificationPayload = 40,
    /// The subject's bio data could not be found.
    UnableToFindUserBioData = 41,
    /// Saving a member profile request failed.
    UnableToSaveMemberProfileRequest = 42,
    /// Checking whether the user is an admin failed.
    UnableToCheckIfUserIsAnAdmin = 43,
    /// The logged in user is not an admin.
    LoggedInUserIsNotAnAdmin = 44,
    /// Retrieving member request notifications failed.
    UnableToRetrieveMemberRequestNotifications = 45,
    /// Mapping a member request notification document failed.
    UnableToMapMemberRequestNotification = 46,
    /// No notification node exists with the given ID.
    UnableToRetrieveNotification = 47,
    /// A notification payload node was expected but another type was found.
    WrongNodeType = 48,
    /// A notification payload node came back empty.
    NilNotificationPayloadNode = 49,
    /// Saving a notification after marking it read failed.
    UnableToSaveNotification = 50,
    /// The user has no confirmed primary phone number.
    NoConfirmedPhoneNumbers = 51,
    /// The phone number format is invalid.
    InvalidPhoneNumberFormat = 52,
    /// Sending a text to the phone number failed.
    UnableToSendText = 53,
    /// An unknown state was provided.
    UnknownStateProvided = 54,
    /// Fetching the provider list failed.
    UnableToFetchProviderList = 55,
    /// The card value is not a string.
    ExpectedCardToBeTypeString = 56,
    /// The `HasSladeCard` value is not a bool.
    HasSladeCard = 57,
}

impl ErrorCode {
    /// Every registered code, in ascending value order.
    pub const ALL: [ErrorCode; 57] = [
        ErrorCode::Ok,
        ErrorCode::Internal,
        ErrorCode::UndefinedArguments,
        ErrorCode::PhoneNumberInUse,
        ErrorCode::EmailAddressInUse,
        ErrorCode::UsernameInUse,
        ErrorCode::ProfileNotFound,
        ErrorCode::PinMismatch,
        ErrorCode::PinNotFound,
        ErrorCode::UserNotFound,
        ErrorCode::ProfileSuspended,
        ErrorCode::PinError,
        ErrorCode::InvalidPushTokenLength,
        ErrorCode::InvalidEnum,
        ErrorCode::OtpVerificationFailed,
        ErrorCode::MissingInput,
        ErrorCode::InvalidFlavour,
        ErrorCode::RecordNotFound,
        ErrorCode::UnableToFindProvider,
        ErrorCode::PublishNudgeFailure,
        ErrorCode::InvalidCredentials,
        ErrorCode::AddNewRecordError,
        ErrorCode::InvalidSladeCode,
        ErrorCode::KycAlreadySubmitted,
        ErrorCode::RoleNotValid,
        ErrorCode::InsuranceDetailsNotCoverLinked,
        ErrorCode::CoverAlreadyExists,
        ErrorCode::UserNotAuthorizedToAccessThisResource,
        ErrorCode::NilEligibilityMember,
        ErrorCode::MinorMember,
        ErrorCode::NilPayerDetails,
        ErrorCode::FailedToLookUpEligibility,
        ErrorCode::UnlinkedCover,
        ErrorCode::NoBeneficiaryWithMemberNumber,
        ErrorCode::FailedToFetchDependants,
        ErrorCode::InvalidCover,
        ErrorCode::UnableToAddCover,
        ErrorCode::NotARecognizedDocumentType,
        ErrorCode::FailedCreateMemberProfile,
        ErrorCode::FailedCreateMemberProfileNotificationPayload,
        ErrorCode::UnableToFindUserBioData,
        ErrorCode::UnableToSaveMemberProfileRequest,
        ErrorCode::UnableToCheckIfUserIsAnAdmin,
        ErrorCode::LoggedInUserIsNotAnAdmin,
        ErrorCode::UnableToRetrieveMemberRequestNotifications,
        ErrorCode::UnableToMapMemberRequestNotification,
        ErrorCode::UnableToRetrieveNotification,
        ErrorCode::WrongNodeType,
        ErrorCode::NilNotificationPayloadNode,
        ErrorCode::UnableToSaveNotification,
        ErrorCode::NoConfirmedPhoneNumbers,
        ErrorCode::InvalidPhoneNumberFormat,
        ErrorCode::UnableToSendText,
        ErrorCode::UnknownStateProvided,
        ErrorCode::UnableToFetchProviderList,
        ErrorCode::ExpectedCardToBeTypeString,
        ErrorCode::HasSladeCard,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Symbolic name shared with the other services, e.g. `"PINMismatch"`.
    pub fn name(self) -> &'static str {
        match self {
            ErrorCode::Ok => "OK",
            ErrorCode::Internal => "Internal",
            ErrorCode::UndefinedArguments => "UndefinedArguments",
            ErrorCode::PhoneNumberInUse => "PhoneNumberInUse",
            ErrorCode::EmailAddressInUse => "EmailAddressInUse",
            ErrorCode::UsernameInUse => "UsernameInUse",
            ErrorCode::ProfileNotFound => "ProfileNotFound",
            ErrorCode::PinMismatch => "PINMismatch",
            ErrorCode::PinNotFound => "PINNotFound",
            ErrorCode::UserNotFound => "UserNotFound",
            ErrorCode::ProfileSuspended => "ProfileSuspended",
            ErrorCode::PinError => "PINError",
            ErrorCode::InvalidPushTokenLength => "InvalidPushTokenLength",
            ErrorCode::InvalidEnum => "InvalidEnum",
            ErrorCode::OtpVerificationFailed => "OTPVerificationFailed",
            ErrorCode::MissingInput => "MissingInput",
            ErrorCode::InvalidFlavour => "InvalidFlavour",
            ErrorCode::RecordNotFound => "RecordNotFound",
            ErrorCode::UnableToFindProvider => "UnableToFindProvider",
            ErrorCode::PublishNudgeFailure => "PublishNudgeFailure",
            ErrorCode::InvalidCredentials => "InvalidCredentials",
            ErrorCode::AddNewRecordError => "AddNewRecordError",
            ErrorCode::InvalidSladeCode => "InvalidSladeCode",
            ErrorCode::KycAlreadySubmitted => "KYCAlreadySubmitted",
            ErrorCode::RoleNotValid => "RoleNotValid",
            ErrorCode::InsuranceDetailsNotCoverLinked => "InsuranceDetailsNotCoverLinked",
            ErrorCode::CoverAlreadyExists => "CoverAlreadyExists",
            ErrorCode::UserNotAuthorizedToAccessThisResource => {
                "UserNotAuthorizedToAccessThisResource"
            }
            ErrorCode::NilEligibilityMember => "NilEligibilityMember",
            ErrorCode::MinorMember => "MinorMember",
            ErrorCode::NilPayerDetails => "NilPayerDetails",
            ErrorCode::FailedToLookUpEligibility => "FailedToLookUpEligibility",
            ErrorCode::UnlinkedCover => "UnlinkedCover",
            ErrorCode::NoBeneficiaryWithMemberNumber => "NoBeneficiaryWithMemberNumber",
            ErrorCode::FailedToFetchDependants => "FailedToFetchDependants",
            ErrorCode::InvalidCover => "InvalidCover",
            ErrorCode::UnableToAddCover => "UnableToAddCover",
            ErrorCode::NotARecognizedDocumentType => "NotARecognizedDocumentType",
            ErrorCode::FailedCreateMemberProfile => "FailedCreateMemberProfile",
            ErrorCode::FailedCreateMemberProfileNotificationPayload => {
                "FailedCreateMemberProfileNotificationPayload"
            }
            ErrorCode::UnableToFindUserBioData => "UnableToFindUserBioData",
            ErrorCode::UnableToSaveMemberProfileRequest => "UnableToSaveMemberProfileRequest",
            ErrorCode::UnableToCheckIfUserIsAnAdmin => "UnableToCheckIfUserIsAnAdmin",
            ErrorCode::LoggedInUserIsNotAnAdmin => "LoggedInUserIsNotAnAdmin",
            ErrorCode::UnableToRetrieveMemberRequestNotifications => {
                "UnableToRetrieveMemberRequestNotifications"
            }
            ErrorCode::UnableToMapMemberRequestNotification => {
                "UnableToMapMemberRequestNotification"
            }
            ErrorCode::UnableToRetrieveNotification => "UnableToRetrieveNotification",
            ErrorCode::WrongNodeType => "WrongNodeType",
            ErrorCode::NilNotificationPayloadNode => "NilNotificationPayloadNode",
            ErrorCode::UnableToSaveNotification => "UnableToSaveNotification",
            ErrorCode::NoConfirmedPhoneNumbers => "NoConfirmedPhoneNumbers",
            ErrorCode::InvalidPhoneNumberFormat => "InvalidPhoneNumberFormat",
            ErrorCode::UnableToSendText => "UnableToSendText",
            ErrorCode::UnknownStateProvided => "UnknownStateProvided",
            ErrorCode::UnableToFetchProviderList => "UnableToFetchProviderList",
            ErrorCode::ExpectedCardToBeTypeString => "ExpectedCardToBeTypeString",
            ErrorCode::HasSladeCard => "HasSladeCard",
        }
    }

    /// One-line description of the condition that produces this code.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::Ok => "success",
            ErrorCode::Internal => "an internal invariant has been broken",
            ErrorCode::UndefinedArguments => "one or more required arguments are missing",
            ErrorCode::PhoneNumberInUse => "phone number already has an associated profile",
            ErrorCode::EmailAddressInUse => "email address already has an associated profile",
            ErrorCode::UsernameInUse => "username is already taken",
            ErrorCode::ProfileNotFound => "user profile not found",
            ErrorCode::PinMismatch => "the provided PINs do not match",
            ErrorCode::PinNotFound => "user PIN not found",
            ErrorCode::UserNotFound => "user auth account not found",
            ErrorCode::ProfileSuspended => "user profile has been suspended",
            ErrorCode::PinError => "the PIN could not be processed",
            ErrorCode::InvalidPushTokenLength => "push token is too short",
            ErrorCode::InvalidEnum => "invalid enum value",
            ErrorCode::OtpVerificationFailed => "the OTP could not be verified",
            ErrorCode::MissingInput => "no OTP was submitted",
            ErrorCode::InvalidFlavour => "flavour must be consumer or pro",
            ErrorCode::RecordNotFound => "record not found",
            ErrorCode::UnableToFindProvider => "provider not found in the charge master",
            ErrorCode::PublishNudgeFailure => "failed to publish nudge",
            ErrorCode::InvalidCredentials => "invalid credentials",
            ErrorCode::AddNewRecordError => "the record could not be saved",
            ErrorCode::InvalidSladeCode => "slade code does not match the chosen provider",
            ErrorCode::KycAlreadySubmitted => "KYC has already been submitted",
            ErrorCode::RoleNotValid => "user role does not permit this operation",
            ErrorCode::InsuranceDetailsNotCoverLinked => "insurance details are not cover-linked",
            ErrorCode::CoverAlreadyExists => "cover already exists",
            ErrorCode::UserNotAuthorizedToAccessThisResource => {
                "user is not authorized to access this resource"
            }
            ErrorCode::NilEligibilityMember => "eligibility lookup returned no member",
            ErrorCode::MinorMember => "a minor cannot add their own cover",
            ErrorCode::NilPayerDetails => "payer details are missing",
            ErrorCode::FailedToLookUpEligibility => "eligibility lookup failed",
            ErrorCode::UnlinkedCover => "cover details are not linked",
            ErrorCode::NoBeneficiaryWithMemberNumber => "no beneficiary with that member number",
            ErrorCode::FailedToFetchDependants => "failed to fetch dependants",
            ErrorCode::InvalidCover => "eligibility status is not a valid cover",
            ErrorCode::UnableToAddCover => "the cover was not added",
            ErrorCode::NotARecognizedDocumentType => "unrecognized identification document",
            ErrorCode::FailedCreateMemberProfile => "failed to create member profile",
            ErrorCode::FailedCreateMemberProfileNotificationPayload => {
                "failed to create member profile notification payload"
            }
            ErrorCode::UnableToFindUserBioData => "user bio data not found",
            ErrorCode::UnableToSaveMemberProfileRequest => "failed to save member profile request",
            ErrorCode::UnableToCheckIfUserIsAnAdmin => "failed to check admin status",
            ErrorCode::LoggedInUserIsNotAnAdmin => "logged in user is not an admin",
            ErrorCode::UnableToRetrieveMemberRequestNotifications => {
                "failed to retrieve member request notifications"
            }
            ErrorCode::UnableToMapMemberRequestNotification => {
                "failed to map member request notification"
            }
            ErrorCode::UnableToRetrieveNotification => "notification not found",
            ErrorCode::WrongNodeType => "expected a notification payload node",
            ErrorCode::NilNotificationPayloadNode => "notification payload node is empty",
            ErrorCode::UnableToSaveNotification => "failed to save notification",
            ErrorCode::NoConfirmedPhoneNumbers => "no confirmed primary phone number",
            ErrorCode::InvalidPhoneNumberFormat => "invalid phone number format",
            ErrorCode::UnableToSendText => "failed to send text",
            ErrorCode::UnknownStateProvided => "unknown state provided",
            ErrorCode::UnableToFetchProviderList => "failed to fetch provider list",
            ErrorCode::ExpectedCardToBeTypeString => "card value must be a string",
            ErrorCode::HasSladeCard => "HasSladeCard value must be a bool",
        }
    }
}

impl From<ErrorCode> for i32 {
    fn from(value: ErrorCode) -> Self {
        value.code()
    }
}

impl TryFrom<i32> for ErrorCode {
    type Error = UnknownErrorCode;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        // ALL is dense and starts at 1.
        value
            .checked_sub(1)
            .and_then(|idx| usize::try_from(idx).ok())
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(UnknownErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i32::deserialize(deserializer)?;
        ErrorCode::try_from(raw).map_err(de::Error::custom)
    }
}
