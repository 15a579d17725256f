use crate::app::event::DeliveryToken;
use crate::gift::GiftCard;

#[derive(Debug)]
pub enum Action {
    ScheduleGiftDelivery { token: DeliveryToken, card: GiftCard },
    Quit,
}
